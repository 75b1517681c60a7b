//! Общие типы данных, разделяемые фронтендом и REST-бэкендом
//! системы контроля качества: справочники, партии, результаты контроля
//! и схемы аутентификации.

pub mod domain;
pub mod system;
