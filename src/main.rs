// The listing only runs against the Win32 backend; other targets build it for tests.
#![cfg_attr(not(windows), allow(dead_code))]

mod app {
    pub mod assets;
    pub mod cli_args;
    pub mod configs;
    pub mod window_filter;
}

mod app_main;

fn main() {
    app_main::main();
}
