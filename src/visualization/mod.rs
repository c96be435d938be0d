pub mod boxsim_vis3d;
pub mod boxsim_headless;
