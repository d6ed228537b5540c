mod rest_persistence;
