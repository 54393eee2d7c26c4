pub mod antt_ops;
