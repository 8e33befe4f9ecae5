pub mod p900_category_index;
