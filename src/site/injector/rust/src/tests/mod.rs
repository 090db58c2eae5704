/* src/site/injector/rust/src/tests/mod.rs */
