pub mod error;
pub mod tags;

pub mod admin {
    pub mod dto;
    pub mod routes;
}
pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod category {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod checkout {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod settings {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod testimonial {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
