pub mod csv_writer;
pub mod fetch_page;
pub mod generate_delay;
pub mod normalize_text;
pub mod resolve_url;
