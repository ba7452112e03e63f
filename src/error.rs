/*

    Errors raised by the geometry core.

    Nearly everything in this crate is total. The one partial
    operation is the angle between two vectors, which is
    undefined when either of them has zero length.

    @date: 14 Nov, 2025
    @author: bartu
*/

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{operation} is undefined for a zero-length vector")]
    Domain { operation: &'static str },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
