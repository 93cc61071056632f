pub mod anvil;   // smoke deployment on a disposable fork
pub mod deploy;  // artifact-driven contract deployment
pub mod inspect; // read-only pool state
pub mod logger;  // measure_start, structured jsonl logs
pub mod swap;    // deposit, approve, exactInputSingle
