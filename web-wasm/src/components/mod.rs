pub mod beer_detail;
pub mod beer_list;
pub mod header;
pub mod review_list;
