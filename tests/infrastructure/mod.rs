mod script_model_provisioner_test;
