/// Defines the command interface for the systems that actions drive
pub mod system;

/// Provides the roller system
pub mod roller;
