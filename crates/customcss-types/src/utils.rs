//! Utility functions

/// Length of a well-formed character reference at the start of `s`
/// (`&amp;`, `&#39;`, `&#x27;`), including the leading `&` and trailing `;`.
fn char_ref_len(s: &str) -> Option<usize> {
	let bytes = s.as_bytes();
	if bytes.first() != Some(&b'&') {
		return None;
	}

	let (start, max_len, valid): (usize, usize, fn(u8) -> bool) = match bytes.get(1) {
		Some(b'#') => match bytes.get(2) {
			Some(b'x' | b'X') => (3, 8, |c| c.is_ascii_hexdigit()),
			_ => (2, 8, |c| c.is_ascii_digit()),
		},
		Some(c) if c.is_ascii_alphabetic() => (1, 32, |c| c.is_ascii_alphanumeric()),
		_ => return None,
	};

	let body_len = bytes[start..].iter().take_while(|c| valid(**c)).count();
	if body_len == 0 || body_len > max_len {
		return None;
	}
	(bytes.get(start + body_len) == Some(&b';')).then_some(start + body_len + 1)
}

/// Escape text for embedding in an HTML document.
///
/// This is the only escaping function in the service: style blocks, the
/// stylesheet endpoint and the admin textarea all go through it.
/// `<`, `>`, `"` and `'` are always replaced. `&` is replaced unless it
/// already starts a character reference, so escaping is not applied twice.
pub fn escape_html(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
		result.push_str(&rest[..pos]);
		rest = &rest[pos..];
		let skip = match rest.as_bytes()[0] {
			b'&' => {
				if let Some(len) = char_ref_len(rest) {
					result.push_str(&rest[..len]);
					len
				} else {
					result.push_str("&amp;");
					1
				}
			}
			b'<' => {
				result.push_str("&lt;");
				1
			}
			b'>' => {
				result.push_str("&gt;");
				1
			}
			b'"' => {
				result.push_str("&quot;");
				1
			}
			_ => {
				result.push_str("&#039;");
				1
			}
		};
		rest = &rest[skip..];
	}
	result.push_str(rest);

	result
}


// vim: ts=4
