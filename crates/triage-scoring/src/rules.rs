pub mod consciousness;
pub mod gcs;
pub mod heart_rate;
pub mod oxygen_saturation;
pub mod respiratory_rate;
pub mod systolic_bp;
pub mod temperature;
