pub mod script_launch;
