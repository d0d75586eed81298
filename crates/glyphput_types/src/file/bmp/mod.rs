//! Legacy bitmap container support for `glyphput-rs` project.
//!
//! The glyph atlas ships as an uncompressed 32-bpp bitmap: a 14-byte file
//! header, a 40-byte info header, and the raw pixel data immediately after
//! both headers. Rows are stored bottom-up and each pixel is four bytes in
//! [alpha, red, green, blue] order. Only `width`, `height` and `bit_count`
//! matter to the renderer; everything else is parsed for inspection tooling.
//!
//! The original loader never honored the `off_bits` field; pixel data is
//! taken at the fixed offset right after the two headers, and this module
//! keeps that behavior.

use std::{fmt::Display, io::Read};

use crate::file::BmpError;

/// Bitmap container constants.
pub mod constants {
	/// Magic bytes for bitmap files
	pub const MAGIC: [u8; 2] = [0x42, 0x4D]; // "BM"

	/// Size of the file header in bytes
	pub const FILE_HEADER_SIZE: usize = 14;

	/// Size of the info header in bytes
	pub const INFO_HEADER_SIZE: usize = 40;

	/// Byte offset where pixel data begins (file header + info header)
	pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

	/// The only bit depth the glyph atlas supports
	pub const ATLAS_BIT_COUNT: u16 = 32;
}

/// File header of a bitmap container (14 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileHeader {
	magic: [u8; 2],
	size: u32,
	reserved_1: u16,
	reserved_2: u16,
	off_bits: u32,
}

impl FileHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::FILE_HEADER_SIZE;

	/// Creates a file header describing a bitmap of `size` total bytes.
	pub fn new(size: u32) -> Self {
		Self {
			magic: constants::MAGIC,
			size,
			reserved_1: 0,
			reserved_2: 0,
			off_bits: constants::PIXEL_DATA_OFFSET as u32,
		}
	}

	/// Returns the total file size recorded in the header.
	pub fn size(&self) -> u32 {
		self.size
	}

	/// Returns the pixel data offset recorded in the header.
	///
	/// Present for inspection only; the atlas loader reads pixel data at the
	/// fixed offset after both headers regardless of this field.
	pub fn off_bits(&self) -> u32 {
		self.off_bits
	}

	/// Parses a file header from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
		if data.len() < Self::SIZE {
			return Err(BmpError::InsufficientData {
				expected: Self::SIZE,
				actual: data.len(),
			});
		}

		let magic = [data[0], data[1]];
		if magic != constants::MAGIC {
			return Err(BmpError::InvalidMagic(magic));
		}

		let size = u32::from_le_bytes([data[2], data[3], data[4], data[5]]);
		let reserved_1 = u16::from_le_bytes([data[6], data[7]]);
		let reserved_2 = u16::from_le_bytes([data[8], data[9]]);
		let off_bits = u32::from_le_bytes([data[10], data[11], data[12], data[13]]);

		Ok(Self {
			magic,
			size,
			reserved_1,
			reserved_2,
			off_bits,
		})
	}

	/// Converts the header to bytes
	pub fn to_bytes(&self) -> [u8; Self::SIZE] {
		let mut bytes = [0u8; Self::SIZE];

		bytes[0..2].copy_from_slice(&self.magic);
		bytes[2..6].copy_from_slice(&self.size.to_le_bytes());
		bytes[6..8].copy_from_slice(&self.reserved_1.to_le_bytes());
		bytes[8..10].copy_from_slice(&self.reserved_2.to_le_bytes());
		bytes[10..14].copy_from_slice(&self.off_bits.to_le_bytes());

		bytes
	}
}

impl Display for FileHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Bitmap File Header:\n\
			- Magic: {:02X?}\n\
			- Size: {} bytes\n\
			- Pixel Data Offset: {} bytes",
			self.magic, self.size, self.off_bits,
		)
	}
}

/// Info header of a bitmap container (40 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHeader {
	size: u32,
	width: i32,
	height: i32,
	planes: u16,
	bit_count: u16,
	compression: u32,
	size_image: u32,
	x_pix_per_meter: i32,
	y_pix_per_meter: i32,
	clr_used: u32,
	clr_important: u32,
}

impl InfoHeader {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::INFO_HEADER_SIZE;

	/// Creates an info header for an uncompressed 32-bpp image.
	pub fn new(width: i32, height: i32) -> Self {
		Self {
			size: Self::SIZE as u32,
			width,
			height,
			planes: 1,
			bit_count: constants::ATLAS_BIT_COUNT,
			compression: 0,
			size_image: 0,
			x_pix_per_meter: 0,
			y_pix_per_meter: 0,
			clr_used: 0,
			clr_important: 0,
		}
	}

	/// Returns the image width in pixels (signed, as stored).
	pub fn width(&self) -> i32 {
		self.width
	}

	/// Returns the image height in pixels (signed; positive means bottom-up rows).
	pub fn height(&self) -> i32 {
		self.height
	}

	/// Returns the bit depth of the image.
	pub fn bit_count(&self) -> u16 {
		self.bit_count
	}

	/// Returns the compression field.
	pub fn compression(&self) -> u32 {
		self.compression
	}

	/// Parses an info header from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
		if data.len() < Self::SIZE {
			return Err(BmpError::InsufficientData {
				expected: Self::SIZE,
				actual: data.len(),
			});
		}

		let size = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
		let width = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);
		let height = i32::from_le_bytes([data[8], data[9], data[10], data[11]]);
		let planes = u16::from_le_bytes([data[12], data[13]]);
		let bit_count = u16::from_le_bytes([data[14], data[15]]);
		let compression = u32::from_le_bytes([data[16], data[17], data[18], data[19]]);
		let size_image = u32::from_le_bytes([data[20], data[21], data[22], data[23]]);
		let x_pix_per_meter = i32::from_le_bytes([data[24], data[25], data[26], data[27]]);
		let y_pix_per_meter = i32::from_le_bytes([data[28], data[29], data[30], data[31]]);
		let clr_used = u32::from_le_bytes([data[32], data[33], data[34], data[35]]);
		let clr_important = u32::from_le_bytes([data[36], data[37], data[38], data[39]]);

		Ok(Self {
			size,
			width,
			height,
			planes,
			bit_count,
			compression,
			size_image,
			x_pix_per_meter,
			y_pix_per_meter,
			clr_used,
			clr_important,
		})
	}

	/// Converts the header to bytes
	pub fn to_bytes(&self) -> [u8; Self::SIZE] {
		let mut bytes = [0u8; Self::SIZE];

		bytes[0..4].copy_from_slice(&self.size.to_le_bytes());
		bytes[4..8].copy_from_slice(&self.width.to_le_bytes());
		bytes[8..12].copy_from_slice(&self.height.to_le_bytes());
		bytes[12..14].copy_from_slice(&self.planes.to_le_bytes());
		bytes[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
		bytes[16..20].copy_from_slice(&self.compression.to_le_bytes());
		bytes[20..24].copy_from_slice(&self.size_image.to_le_bytes());
		bytes[24..28].copy_from_slice(&self.x_pix_per_meter.to_le_bytes());
		bytes[28..32].copy_from_slice(&self.y_pix_per_meter.to_le_bytes());
		bytes[32..36].copy_from_slice(&self.clr_used.to_le_bytes());
		bytes[36..40].copy_from_slice(&self.clr_important.to_le_bytes());

		bytes
	}
}

impl Display for InfoHeader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Bitmap Info Header:\n\
			- Width: {} pixels\n\
			- Height: {} pixels\n\
			- Planes: {}\n\
			- Bit Count: {}\n\
			- Compression: {}",
			self.width, self.height, self.planes, self.bit_count, self.compression,
		)
	}
}

/// A parsed 32-bpp atlas bitmap.
///
/// Owns the raw pixel buffer for the lifetime of the font using it. Rows are
/// stored bottom-up; consumers are responsible for the vertical flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// File header of the bitmap
	file_header: FileHeader,

	/// Info header of the bitmap
	info_header: InfoHeader,

	/// Raw pixel data, 4 bytes per pixel in [alpha, red, green, blue] order
	pixels: Vec<u8>,
}

impl File {
	/// Returns a reference to the file header.
	pub fn file_header(&self) -> &FileHeader {
		&self.file_header
	}

	/// Returns a reference to the info header.
	pub fn info_header(&self) -> &InfoHeader {
		&self.info_header
	}

	/// Returns the image width in pixels.
	pub fn width(&self) -> u32 {
		self.info_header.width.unsigned_abs()
	}

	/// Returns the image height in pixels.
	pub fn height(&self) -> u32 {
		self.info_header.height.unsigned_abs()
	}

	/// Returns the bit depth of the image.
	pub fn bit_count(&self) -> u16 {
		self.info_header.bit_count
	}

	/// Returns a reference to the raw pixel data.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Opens and parses an atlas bitmap from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is not a usable
	/// 32-bpp bitmap.
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, BmpError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Creates an atlas bitmap from any reader.
	///
	/// This reads the entire file into memory; the renderer needs random
	/// access to the pixel buffer.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, BmpError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data)
	}

	/// Parses an atlas bitmap from a byte slice.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The buffer is too short for the two headers
	/// - The magic bytes are wrong
	/// - The dimensions are not positive
	/// - The bit depth is not 32
	pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
		let file_header = FileHeader::from_bytes(data)?;
		let info_header = InfoHeader::from_bytes(&data[FileHeader::SIZE..])?;

		if info_header.width <= 0 || info_header.height <= 0 {
			return Err(BmpError::InvalidDimensions {
				width: info_header.width,
				height: info_header.height,
			});
		}

		// Everything downstream assumes exactly 4 bytes per pixel
		if info_header.bit_count != constants::ATLAS_BIT_COUNT {
			return Err(BmpError::UnsupportedBitCount(info_header.bit_count));
		}

		let pixels = data[constants::PIXEL_DATA_OFFSET..].to_vec();

		Ok(Self {
			file_header,
			info_header,
			pixels,
		})
	}

	/// Serializes the bitmap back to bytes.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut buffer =
			Vec::with_capacity(constants::PIXEL_DATA_OFFSET + self.pixels.len());

		buffer.extend_from_slice(&self.file_header.to_bytes());
		buffer.extend_from_slice(&self.info_header.to_bytes());
		buffer.extend_from_slice(&self.pixels);

		buffer
	}
}

impl TryFrom<&[u8]> for File {
	type Error = BmpError;

	fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
		Self::from_bytes(value)
	}
}

impl From<&File> for Vec<u8> {
	fn from(file: &File) -> Self {
		file.to_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn atlas_bytes(width: i32, height: i32, bit_count: u16) -> Vec<u8> {
		let pixel_bytes = (width * height * 4) as usize;
		let total = constants::PIXEL_DATA_OFFSET + pixel_bytes;

		let mut info = InfoHeader::new(width, height);
		info.bit_count = bit_count;

		let mut data = Vec::with_capacity(total);
		data.extend_from_slice(&FileHeader::new(total as u32).to_bytes());
		data.extend_from_slice(&info.to_bytes());
		data.resize(total, 0);
		data
	}

	#[test]
	fn test_parse_atlas() {
		let data = atlas_bytes(16, 8, 32);
		let file = File::from_bytes(&data).unwrap();

		assert_eq!(file.width(), 16);
		assert_eq!(file.height(), 8);
		assert_eq!(file.bit_count(), 32);
		assert_eq!(file.pixels().len(), 16 * 8 * 4);
	}

	#[test]
	fn test_rejects_wrong_bit_count() {
		let data = atlas_bytes(16, 8, 24);
		let result = File::from_bytes(&data);

		assert!(matches!(result, Err(BmpError::UnsupportedBitCount(24))));
	}

	#[test]
	fn test_rejects_bad_magic() {
		let mut data = atlas_bytes(16, 8, 32);
		data[0] = b'X';
		let result = File::from_bytes(&data);

		assert!(matches!(result, Err(BmpError::InvalidMagic(_))));
	}

	#[test]
	fn test_rejects_short_buffer() {
		let data = atlas_bytes(16, 8, 32);
		let result = File::from_bytes(&data[..FileHeader::SIZE + 10]);

		assert!(matches!(result, Err(BmpError::InsufficientData { .. })));
	}

	#[test]
	fn test_rejects_bad_dimensions() {
		let mut data = atlas_bytes(16, 8, 32);
		// Patch width to -16
		data[FileHeader::SIZE + 4..FileHeader::SIZE + 8]
			.copy_from_slice(&(-16i32).to_le_bytes());
		let result = File::from_bytes(&data);

		assert!(matches!(result, Err(BmpError::InvalidDimensions { .. })));
	}

	#[test]
	fn test_header_roundtrip() {
		let data = atlas_bytes(496, 74, 32);
		let file = File::from_bytes(&data).unwrap();

		assert_eq!(file.to_bytes(), data);
	}

	#[test]
	fn test_off_bits_is_not_honored() {
		let mut data = atlas_bytes(4, 4, 32);
		// A bogus pixel-data offset must not change where pixels are read from
		data[10..14].copy_from_slice(&0xDEADu32.to_le_bytes());
		let file = File::from_bytes(&data).unwrap();

		assert_eq!(file.file_header().off_bits(), 0xDEAD);
		assert_eq!(file.pixels().len(), 4 * 4 * 4);
	}

	#[test]
	fn test_from_reader() {
		let data = atlas_bytes(8, 8, 32);
		let mut cursor = std::io::Cursor::new(data);
		let file = File::from_reader(&mut cursor).unwrap();

		assert_eq!(file.width(), 8);
	}
}
