mod helpers;
mod roster_test;
mod wire_test;
