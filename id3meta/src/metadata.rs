//! The format-agnostic metadata record
//!
//! A [`Metadata`] maps field names to one or more values, keeping fields in the order they were
//! first added. Some field names carry a suffix after a colon:
//!
//! * `performer:<role>`
//! * `comment:<description>`
//! * `lyrics:<description>`
//!
//! Names starting with `~` are computed while reading (such as `~format`) and are not written back,
//! with two exceptions: `~rating`, and the `~id3:<frame id>` / `~id3:TXXX:<description>`
//! escape fields, which are written verbatim as the named frame.

/// An embedded image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
	/// The image's MIME type, such as `image/jpeg`
	pub mime_type: String,
	/// The raw image data
	pub data: Vec<u8>,
}

impl Image {
	/// Create a new `Image`
	pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
		Self {
			mime_type: mime_type.into(),
			data,
		}
	}
}

/// An ordered multi-map of field names to values, with a list of images
///
/// # Examples
///
/// ```rust
/// use id3meta::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.add("artist", "Foo artist");
/// metadata.add("artist", "Bar artist");
/// metadata.set("title", "Baz title");
///
/// assert_eq!(metadata.get("artist"), Some("Foo artist"));
/// assert_eq!(metadata.get_all("artist"), ["Foo artist", "Bar artist"]);
/// assert_eq!(metadata.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
	items: Vec<(String, Vec<String>)>,
	images: Vec<Image>,
}

impl Metadata {
	/// Create an empty `Metadata`
	pub fn new() -> Self {
		Self::default()
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.items.iter().position(|(key, _)| key == name)
	}

	/// Appends a value to a field, creating the field if needed
	pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();

		match self.position(&name) {
			Some(idx) => self.items[idx].1.push(value),
			None => self.items.push((name, vec![value])),
		}
	}

	/// Replaces all of a field's values with `value`
	///
	/// The field keeps its position if it already exists.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();

		match self.position(&name) {
			Some(idx) => self.items[idx].1 = vec![value],
			None => self.items.push((name, vec![value])),
		}
	}

	/// Gets the first value of a field
	pub fn get(&self, name: &str) -> Option<&str> {
		self.get_all(name).first().map(String::as_str)
	}

	/// Gets all values of a field, empty if the field doesn't exist
	pub fn get_all(&self, name: &str) -> &[String] {
		match self.position(name) {
			Some(idx) => &self.items[idx].1,
			None => &[],
		}
	}

	/// Whether the field exists
	pub fn contains(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	/// Removes a field, returning its values
	pub fn remove(&mut self, name: &str) -> Vec<String> {
		match self.position(name) {
			Some(idx) => self.items.remove(idx).1,
			None => Vec::new(),
		}
	}

	/// Iterates over every field and its values, in insertion order
	pub fn raw_items(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.items
			.iter()
			.map(|(name, values)| (name.as_str(), values.as_slice()))
	}

	/// The number of fields
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether there are no fields and no images
	pub fn is_empty(&self) -> bool {
		self.items.is_empty() && self.images.is_empty()
	}

	/// All images, in insertion order
	pub fn images(&self) -> &[Image] {
		&self.images
	}

	/// Appends an image
	pub fn add_image(&mut self, image: Image) {
		self.images.push(image);
	}
}
