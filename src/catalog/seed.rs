use rust_decimal::dec;

use crate::models::Product;

// The baseline catalog known without any upstream call. Built once at startup
// and injected; never mutated afterwards.
pub fn baseline() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Smartphone XYZ".to_string(),
            company: "AMZ".to_string(),
            category: "phone".to_string(),
            price: dec!(499.99),
            image_url: "https://via.placeholder.com/300?text=Smartphone+XYZ".to_string(),
            rating: 4,
            discount: 15,
            available: true,
        },
        Product {
            id: 2,
            name: "Laptop ABC".to_string(),
            company: "FLP".to_string(),
            category: "laptop".to_string(),
            price: dec!(1299.99),
            image_url: "https://via.placeholder.com/300?text=Laptop+ABC".to_string(),
            rating: 5,
            discount: 10,
            available: true,
        },
        Product {
            id: 3,
            name: "Bluetooth Speaker".to_string(),
            company: "SNP".to_string(),
            category: "speaker".to_string(),
            price: dec!(79.99),
            image_url: "https://via.placeholder.com/300?text=Bluetooth+Speaker".to_string(),
            rating: 4,
            discount: 20,
            available: false,
        },
        Product {
            id: 4,
            name: "Wireless Mouse".to_string(),
            company: "MYN".to_string(),
            category: "mouse".to_string(),
            price: dec!(29.99),
            image_url: "https://via.placeholder.com/300?text=Wireless+Mouse".to_string(),
            rating: 3,
            discount: 12,
            available: true,
        },
        Product {
            id: 5,
            name: "Tablet XYZ".to_string(),
            company: "AZO".to_string(),
            category: "tablet".to_string(),
            price: dec!(199.99),
            image_url: "https://via.placeholder.com/300?text=Tablet+XYZ".to_string(),
            rating: 4,
            discount: 18,
            available: true,
        },
    ]
}
