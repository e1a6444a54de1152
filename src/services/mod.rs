// Service exports
pub mod geocoding;
pub mod supabase;

pub use geocoding::{resolve_origin, GeocodingClient, GeocodingError};
pub use supabase::{SupabaseClient, SupabaseError};
