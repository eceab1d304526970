pub mod option_math;
