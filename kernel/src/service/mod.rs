pub mod colleague;
