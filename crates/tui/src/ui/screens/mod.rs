pub mod historial;
pub mod resumen;
