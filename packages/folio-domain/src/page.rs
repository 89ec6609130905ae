use serde::{Deserialize, Serialize};

/// One page of a numbered listing, 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
	pub content: Vec<T>,
	pub total_elements: u64,
	pub total_pages: u64,
	pub page: u32,
	pub size: u32,
	pub first: bool,
	pub last: bool,
	pub has_next: bool,
	pub has_previous: bool,
}

impl<T> Page<T> {
	pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
		let total_pages = total_pages(total_elements, size);
		let last = total_pages == 0 || u64::from(page) >= total_pages;

		Self {
			content,
			total_elements,
			total_pages,
			page,
			size,
			first: page == 1,
			last,
			has_next: !last,
			has_previous: page > 1,
		}
	}
}

pub fn total_pages(total_elements: u64, size: u32) -> u64 {
	if size == 0 {
		return 0;
	}

	total_elements.div_ceil(u64::from(size))
}
