use super::common::read_payload;
use crate::header::normalize_header;
use crate::{CompressedImage, DecodeError, wire};

pub(crate) fn parse_compressed_image(payload: &[u8]) -> Result<CompressedImage, DecodeError> {
    let raw: wire::CompressedImage = read_payload(payload)?;
    Ok(CompressedImage {
        header: normalize_header(raw.header.as_ref()),
        format: raw.format,
        data: raw.data,
    })
}
