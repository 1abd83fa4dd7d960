use crate::{config::*, error::*, state::*};

/// Scholarship as listed by a client that keeps its own ordering column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FeaturedRow {
    pub scholarship_id: u16,
    pub is_highlighted: bool,
    pub featured_order: Option<u8>,
}

/// Appends `id` to the featured list and returns its featured order.
pub fn highlight(featured: &mut Vec<u16>, id: u16) -> Result<u8, ScholarshipError> {
    if featured.contains(&id) {
        return Err(ScholarshipError::AlreadyHighlighted);
    }
    if featured.len() >= FEATURED_CAPACITY {
        return Err(ScholarshipError::CapacityExceeded);
    }
    featured.push(id);
    Ok(featured.len() as u8)
}

/// Removes `id`; scholarships featured after it move up one place.
pub fn unhighlight(featured: &mut Vec<u16>, id: u16) -> Result<(), ScholarshipError> {
    let i = featured
        .iter()
        .position(|&f| f == id)
        .ok_or(ScholarshipError::NotHighlighted)?;
    featured.remove(i);
    Ok(())
}

/// Swaps `id` with its neighbour. Returns `false` when `id` is already at
/// the edge it is moving towards.
pub fn reorder(featured: &mut [u16], id: u16, direction: Direction) -> Result<bool, ScholarshipError> {
    let i = featured
        .iter()
        .position(|&f| f == id)
        .ok_or(ScholarshipError::NotHighlighted)?;
    let j = match direction {
        Direction::Up if i > 0 => i - 1,
        Direction::Down if i + 1 < featured.len() => i + 1,
        _ => return Ok(false),
    };
    featured.swap(i, j);
    Ok(true)
}

pub fn featured_order(featured: &[u16], id: u16) -> Option<u8> {
    featured
        .iter()
        .position(|&f| f == id)
        .map(|i| i as u8 + 1)
}

pub fn featured_rows(featured: &[u16]) -> heapless::Vec<FeaturedRow, FEATURED_CAPACITY> {
    featured
        .iter()
        .take(FEATURED_CAPACITY)
        .zip(1..)
        .map(|(&scholarship_id, order)| FeaturedRow {
            scholarship_id,
            is_highlighted: true,
            featured_order: Some(order),
        })
        .collect()
}

/// Highlighted rows ordered for display. A missing order sorts as 0 and
/// ties keep input order.
pub fn featured_listing(rows: &[FeaturedRow]) -> heapless::Vec<FeaturedRow, FEATURED_CAPACITY> {
    let mut highlighted: Vec<_> = rows.iter().filter(|r| r.is_highlighted).copied().collect();
    highlighted.sort_by_key(|r| r.featured_order.unwrap_or(0));
    highlighted.into_iter().take(FEATURED_CAPACITY).collect()
}

impl University {
    pub fn featured_order(&self, id: u16) -> Option<u8> {
        featured_order(&self.featured, id)
    }
}
