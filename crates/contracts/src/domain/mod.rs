pub mod a001_section;
pub mod a002_order_form;
