mod parser;
mod reader;

pub use parser::{ArffParser, parse_instance};
pub use reader::{load_dataset, load_dataset_with_test};
