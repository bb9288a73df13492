//! Request documents read by the binary
//!
//! Pricing and session inputs are handed to the binary as files. Reading them
//! is the only place where decoding failures become errors; once decoded, the
//! router and calculator are total.

use crate::portal::{PortalError, PortalResult};
use crate::pricing::{ComboRequest, PricingRequest};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and decode a JSON document
pub fn read_json_file<T, P>(path: P) -> PortalResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading request document");

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        PortalError::invalid_request(format!("{}: {}", path.display(), e))
    })
}

/// Read a single-item pricing request
pub fn read_pricing_request<P: AsRef<Path>>(path: P) -> PortalResult<PricingRequest> {
    read_json_file(path)
}

/// Read a combo pricing request
pub fn read_combo_request<P: AsRef<Path>>(path: P) -> PortalResult<ComboRequest> {
    read_json_file(path)
}

/// Read a stored session blob verbatim; decoding is left to the router
pub fn read_session_file<P: AsRef<Path>>(path: P) -> PortalResult<String> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;
    use std::io::Write;

    #[test]
    fn test_read_pricing_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"item": {{"serviceType": 0, "pricePerNight": 100}}, "duration": {{"value": 1, "unit": "Year"}}}}"#
        )
        .unwrap();

        let request = read_pricing_request(file.path()).unwrap();
        assert_eq!(
            crate::pricing::PriceCalculator::default().price(&request),
            Money::from_major(36000.0)
        );
    }

    #[test]
    fn test_read_combo_request() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"components": [{{"price": 10, "nativeDuration": {{"value": 1, "unit": "Month"}}}}], "duration": {{"value": 6, "unit": "Month"}}}}"#
        )
        .unwrap();

        let request = read_combo_request(file.path()).unwrap();
        assert_eq!(request.components.len(), 1);
        assert_eq!(
            crate::pricing::PriceCalculator::default().price_combo(&request),
            Money::from_major(60.0)
        );
    }

    #[test]
    fn test_invalid_document_is_a_request_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"item": {{"serviceType": 9}}}}"#).unwrap();

        let err = read_pricing_request(file.path()).unwrap_err();
        assert!(matches!(err, PortalError::InvalidRequest(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_session_file("/no/such/session.json").unwrap_err();
        assert!(matches!(err, PortalError::Io(_)));
    }

    #[test]
    fn test_read_session_file_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"  {{"role": "Admin"}}  "#).unwrap();
        assert_eq!(read_session_file(file.path()).unwrap(), r#"{"role": "Admin"}"#);
    }
}
