// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::dashboard::ResumenDashboard};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Todos los contadores del panel en un solo viaje a la base.
    pub async fn resumen(&self) -> Result<ResumenDashboard, AppError> {
        let resumen = sqlx::query_as::<_, ResumenDashboard>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM pedidos) AS total_pedidos,
                (SELECT COUNT(*) FROM pedidos WHERE estado = 'en_proceso') AS pedidos_en_proceso,
                (SELECT COUNT(*) FROM pedidos WHERE estado = 'completado') AS pedidos_completados,
                (SELECT COALESCE(SUM(monto), 0) FROM pagos WHERE estado = 'pagado') AS ingresos,
                (SELECT COUNT(*) FROM pagos WHERE estado = 'pendiente') AS pagos_pendientes,
                (SELECT COUNT(*) FROM usuarios WHERE rol = 'cliente' AND estado = 'activo') AS clientes_activos,
                (SELECT COUNT(*) FROM cotizaciones WHERE estado = 'enviada') AS cotizaciones_abiertas,
                (SELECT COUNT(*) FROM mensajes WHERE estado = 'nuevo') AS mensajes_nuevos
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(resumen)
    }
}
