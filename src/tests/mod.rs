mod sources_test;
