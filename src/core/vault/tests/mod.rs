mod vault_ref_tests;
