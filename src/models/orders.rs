// src/models/orders.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_pedido", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoPedido {
    Nuevo,
    Confirmado,
    EnProceso,
    EnPausa,
    Completado,
    Cancelado,
}

impl EstadoPedido {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPedido::Nuevo => "nuevo",
            EstadoPedido::Confirmado => "confirmado",
            EstadoPedido::EnProceso => "en_proceso",
            EstadoPedido::EnPausa => "en_pausa",
            EstadoPedido::Completado => "completado",
            EstadoPedido::Cancelado => "cancelado",
        }
    }

    // LA única tabla de transiciones legales. El frontend original dejaba
    // fijar cualquier estado desde el formulario de edición; aquí tanto el
    // endpoint de estado como la edición completa pasan por esta regla.
    pub fn puede_transicionar_a(&self, destino: EstadoPedido) -> bool {
        use EstadoPedido::*;
        if *self == destino {
            return true; // re-guardar sin cambio de estado no es una transición
        }
        match (self, destino) {
            (Nuevo, Confirmado) | (Nuevo, Cancelado) => true,
            (Confirmado, EnProceso) | (Confirmado, Cancelado) => true,
            (EnProceso, EnPausa) | (EnProceso, Completado) | (EnProceso, Cancelado) => true,
            (EnPausa, EnProceso) | (EnPausa, Cancelado) => true,
            // Completado y cancelado son absorbentes
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "prioridad_pedido", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Prioridad {
    Baja,
    Media,
    Alta,
    Urgente,
}

// --- PEDIDO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: Uuid,
    pub cliente_id: Uuid,
    #[schema(example = "Desarrollo de sitio corporativo")]
    pub descripcion: String,
    pub estado: EstadoPedido,
    pub prioridad: Prioridad,
    #[schema(example = "10000.00")]
    pub subtotal: Decimal,
    #[schema(example = "500.00")]
    pub descuento: Decimal,
    #[schema(example = "1520.00")]
    pub iva: Decimal,
    #[schema(example = "3000.00")]
    pub anticipo: Decimal,
    #[schema(example = "11020.00")]
    pub total: Decimal,
    #[schema(value_type = Option<String>, format = Date, example = "2026-03-15")]
    pub fecha_entrega_estimada: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Regla del botón "Pagar ahora": un pedido pide pago cuando ya está
// completado y todavía no tiene ningún pago en 'pagado'. La consulta de
// `OrdersRepository::list_por_cliente` calcula exactamente esto en SQL.
pub fn requiere_pago(estado: EstadoPedido, tiene_pago_pagado: bool) -> bool {
    estado == EstadoPedido::Completado && !tiene_pago_pagado
}

// La vista del cliente anota cada pedido con `requiere_pago`
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PedidoCliente {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub pedido: Pedido,
    pub requiere_pago: bool,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePedidoPayload {
    pub cliente_id: Uuid,
    #[validate(length(min = 3, message = "La descripción debe tener al menos 3 caracteres."))]
    pub descripcion: String,
    #[serde(default)]
    pub prioridad: Option<Prioridad>,
    pub subtotal: Decimal,
    #[serde(default)]
    pub descuento: Decimal,
    pub iva: Decimal,
    #[serde(default)]
    pub anticipo: Decimal,
    pub fecha_entrega_estimada: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePedidoPayload {
    #[validate(length(min = 3, message = "La descripción debe tener al menos 3 caracteres."))]
    pub descripcion: String,
    pub estado: EstadoPedido,
    pub prioridad: Prioridad,
    pub subtotal: Decimal,
    pub descuento: Decimal,
    pub iva: Decimal,
    pub anticipo: Decimal,
    pub fecha_entrega_estimada: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CambioEstadoPayload {
    pub estado: EstadoPedido,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CambioPrioridadPayload {
    pub prioridad: Prioridad,
}

// Filtros comunes de las páginas de listado: texto libre + estado exacto.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroPedidos {
    pub buscar: Option<String>,
    pub estado: Option<EstadoPedido>,
    pub prioridad: Option<Prioridad>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use EstadoPedido::*;

    #[test]
    fn flujo_lineal_completo() {
        assert!(Nuevo.puede_transicionar_a(Confirmado));
        assert!(Confirmado.puede_transicionar_a(EnProceso));
        assert!(EnProceso.puede_transicionar_a(Completado));
    }

    #[test]
    fn pausa_es_reversible() {
        assert!(EnProceso.puede_transicionar_a(EnPausa));
        assert!(EnPausa.puede_transicionar_a(EnProceso));
        assert!(!EnPausa.puede_transicionar_a(Completado));
    }

    #[test]
    fn cancelado_alcanzable_desde_estados_abiertos() {
        for estado in [Nuevo, Confirmado, EnProceso, EnPausa] {
            assert!(estado.puede_transicionar_a(Cancelado), "{:?}", estado);
        }
    }

    #[test]
    fn completado_y_cancelado_son_absorbentes() {
        for destino in [Nuevo, Confirmado, EnProceso, EnPausa] {
            assert!(!Completado.puede_transicionar_a(destino));
            assert!(!Cancelado.puede_transicionar_a(destino));
        }
        assert!(!Completado.puede_transicionar_a(Cancelado));
    }

    #[test]
    fn no_hay_saltos_hacia_adelante() {
        assert!(!Nuevo.puede_transicionar_a(EnProceso));
        assert!(!Nuevo.puede_transicionar_a(Completado));
        assert!(!Confirmado.puede_transicionar_a(Completado));
    }

    #[test]
    fn reguardar_el_mismo_estado_no_es_transicion() {
        assert!(EnProceso.puede_transicionar_a(EnProceso));
    }

    #[test]
    fn completado_sin_pago_aplicado_pide_pago() {
        assert!(requiere_pago(Completado, false));
        // con un pago en 'pagado' el botón desaparece
        assert!(!requiere_pago(Completado, true));
    }

    #[test]
    fn un_pedido_abierto_nunca_pide_pago() {
        for estado in [Nuevo, Confirmado, EnProceso, EnPausa, Cancelado] {
            assert!(!requiere_pago(estado, false), "{:?}", estado);
        }
    }

    #[test]
    fn estado_serializa_en_snake_case() {
        assert_eq!(serde_json::to_string(&EnProceso).unwrap(), "\"en_proceso\"");
        let e: EstadoPedido = serde_json::from_str("\"en_pausa\"").unwrap();
        assert_eq!(e, EnPausa);
    }
}
