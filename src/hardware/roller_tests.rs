use super::*;

#[test]
fn when_setting_a_value_should_send_it_to_the_driver() {
    let (roller, receiver) = RollerSystem::new("roller");

    let result = roller.set(0.75);
    assert!(result.is_ok());

    let command = receiver.try_recv();
    assert!(command.is_ok());
    assert_eq!(0.75, command.unwrap());
}

#[test]
fn when_setting_values_should_arrive_in_order() {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let roller = RollerSystem::from_sender("roller", sender);

    roller.set(1.0).unwrap();
    roller.set(-1.0).unwrap();
    roller.set(0.0).unwrap();

    assert_eq!(vec![1.0, -1.0, 0.0], receiver.try_iter().collect::<Vec<_>>());
}

#[test]
fn when_driver_is_gone_setting_a_value_should_fail() {
    let (roller, receiver) = RollerSystem::new("roller");
    drop(receiver);

    let result = roller.set(1.0);

    assert_eq!(
        Err(Error::FailedToSetSystemValue {
            name: "roller".to_string()
        }),
        result
    );
}

#[test]
fn when_creating_roller_should_store_name() {
    let (roller, _receiver) = RollerSystem::new("intake roller");

    assert_eq!("intake roller", roller.name());
}
