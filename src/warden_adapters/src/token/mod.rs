pub mod jwt_issuer;
