mod conservation;
mod rendering;
mod scheduler;
