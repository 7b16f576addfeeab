#[cfg(feature = "compression")]
mod inner {
    use std::ffi::OsStr;
    use std::fs::File;
    use std::io::Read;
    use std::path::Path;

    use crate::error::Result;

    /// Codecs a GTF source may be wrapped in.
    ///
    /// Only the decoder side exists: this crate never writes GTF.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Compression {
        None,
        Gz,
        Zstd,
        Lz4,
        Xz2,
        Bzip2,
    }

    impl Compression {
        pub fn name(&self) -> &str {
            match self {
                Compression::None => "none",
                Compression::Gz => "gzip",
                Compression::Zstd => "zstd",
                Compression::Lz4 => "lz4",
                Compression::Xz2 => "xz2",
                Compression::Bzip2 => "bzip2",
            }
        }

        /// Picks a codec from the file extension.
        pub fn detect<P: AsRef<Path>>(path: P) -> Self {
            match path
                .as_ref()
                .extension()
                .and_then(OsStr::to_str)
            {
                // bgzip is a valid multi-member gzip stream
                Some("gz" | "bgz") => Compression::Gz,
                Some("zst") => Compression::Zstd,
                Some("lz4") => Compression::Lz4,
                Some("xz") => Compression::Xz2,
                Some("bz2") => Compression::Bzip2,
                _ => Compression::None,
            }
        }

        pub fn get_decoder(
            &self,
            handle: File,
        ) -> Result<Box<dyn Read>> {
            let decoder: Box<dyn Read> = match self {
                Compression::Gz => {
                    Box::new(flate2::read::MultiGzDecoder::new(handle))
                },
                Compression::Zstd => Box::new(zstd::Decoder::new(handle)?),
                Compression::Lz4 => Box::new(lz4::Decoder::new(handle)?),
                Compression::Xz2 => {
                    Box::new(xz2::read::XzDecoder::new(handle))
                },
                Compression::Bzip2 => {
                    Box::new(bzip2::read::BzDecoder::new(handle))
                },
                Compression::None => Box::new(handle),
            };
            Ok(decoder)
        }
    }
}

#[cfg(feature = "compression")]
pub use inner::*;
