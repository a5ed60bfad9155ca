//! Fixed file names and the CI secret name the instructions refer to.

/// Keystore read when no `--input` is given, relative to the working directory.
pub const KEYSTORE_FILE: &str = "upload-keystore.jks";

/// Encoded output written when no `--output` is given.
pub const OUTPUT_FILE: &str = "keystore_fixed.txt";

/// CI secret name used in the upload instructions.
pub const SECRET_NAME: &str = "KEYSTORE_BASE64";
