mod status;

pub(crate) use status::{error_line, Reporter};
