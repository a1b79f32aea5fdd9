pub mod a002_order_form;
