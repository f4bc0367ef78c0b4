use namecore::name::{
    Gender,
    Name,
    NameListing,
    PageInfo,
};

pub fn name(id: i64, name: &str, gender: Option<Gender>) -> Name {
    Name {
        id,
        name: name.to_string(),
        gender,
        ..Default::default()
    }
}

/// A page of `page_size` names with sequential ids derived from the page
/// number, so records from different pages never collide.
pub fn listing(page: u32, page_size: u32, is_last_page: bool, gender: Option<Gender>) -> NameListing {
    let offset = (page as i64 - 1) * page_size as i64;
    let prefix = gender.map(|g| g.code()).unwrap_or("A");
    let list = (1..=page_size as i64)
        .map(|i| name(offset + i, &format!("{prefix}{}", offset + i), gender))
        .collect::<Vec<_>>();
    NameListing {
        list,
        page_info: PageInfo {
            total_rows: if is_last_page {
                offset as u64 + page_size as u64
            } else {
                offset as u64 + page_size as u64 * 2
            },
            page,
            page_size,
            is_first_page: page == 1,
            is_last_page,
        },
    }
}

pub fn not_found() -> namecore::error::ApiError {
    namecore::error::ApiError::Request {
        status: 404,
        text: "Not Found".to_string(),
    }
}
