mod script_model_provisioner;

pub use script_model_provisioner::ScriptModelProvisioner;
