//! Conversion between catalog details paths and the opaque identifiers
//! handed to the host between `search` and `update`.

const PATH_SEPARATOR: char = '/';
const ID_SEPARATOR: char = '_';

/// Turn a relative details path into an identifier.
///
/// Lossless only for paths that contain no `_`.
pub fn path_to_id(path: &str) -> String {
    path.replace(PATH_SEPARATOR, &ID_SEPARATOR.to_string())
}

/// Inverse of [`path_to_id`].
pub fn id_to_path(id: &str) -> String {
    id.replace(ID_SEPARATOR, &PATH_SEPARATOR.to_string())
}
