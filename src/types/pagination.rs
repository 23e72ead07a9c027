use std::collections::HashMap;

use handle_errors::Error;

/// A window over the index listing, taken from the `start` and `end`
/// query parameters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub start: usize,
    pub end: usize,
}

/// Extract a pagination window from the request's query parameters.
/// Both parameters are required once either is present.
pub fn extract_pagination(params: HashMap<String, String>) -> Result<Pagination, Error> {
    if let (Some(start), Some(end)) = (params.get("start"), params.get("end")) {
        return Ok(Pagination {
            start: start.parse::<usize>().map_err(Error::ParseError)?,
            end: end.parse::<usize>().map_err(Error::ParseError)?,
        });
    }

    Err(Error::MissingParameters)
}
