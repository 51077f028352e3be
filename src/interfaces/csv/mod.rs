pub mod api_response_reader;
pub mod order_exporter;
pub mod order_reader;
pub mod report_writer;
