mod health_check;
mod results;
mod survey;

pub use health_check::*;
pub use results::*;
pub use survey::*;
