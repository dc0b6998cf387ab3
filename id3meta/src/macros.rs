// Shorthand for return Err(Id3MetaError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(Id3MetaError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(Id3MetaError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::Id3MetaError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::Id3MetaError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for Id3MetaError::new(ErrorKind::FileDecoding("Message"))
//
// Usage:
//
// - decode_err!(Message)
//
// or bail:
//
// - decode_err!(@BAIL Message)
macro_rules! decode_err {
	($reason:literal) => {
		crate::error::Id3MetaError::new(crate::error::ErrorKind::FileDecoding($reason))
	};
	(@BAIL $reason:literal) => {
		return Err(decode_err!($reason))
	};
}

pub(crate) use {decode_err, err};
