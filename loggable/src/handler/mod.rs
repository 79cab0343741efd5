pub mod aspect;
