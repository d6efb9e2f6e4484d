mod od_tool;
mod result_schema;

pub use od_tool::OdTool;
pub use result_schema::ResultSchema;
