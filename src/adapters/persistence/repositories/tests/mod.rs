mod identity_repository_tests;
