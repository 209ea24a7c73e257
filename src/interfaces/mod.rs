pub mod oizom_api;
