mod refresh_token_family_tests;
