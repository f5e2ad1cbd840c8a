pub mod automation_exercise;
