// WakeWatch — Hardware Drivers

pub mod display;
pub mod haptic;
pub mod imu;
