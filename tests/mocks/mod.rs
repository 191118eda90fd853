pub mod identity_mock;
