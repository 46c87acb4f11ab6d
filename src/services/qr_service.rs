//! Servicio de generación de códigos QR
//!
//! El QR codifica la URL pública de verificación de escaneo, con la
//! matrícula y el token del dispositivo como query params. El PNG se
//! guarda en disco al registrar el vehículo y también puede regenerarse
//! al vuelo para servirlo por HTTP.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::Luma;
use qrcode::QrCode;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

pub struct QrService {
    base_url: String,
    output_dir: String,
}

impl QrService {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            output_dir: config.qr_output_dir.clone(),
        }
    }

    /// URL de verificación que viaja dentro del QR
    pub fn scan_url(&self, plate: &str, token: &str) -> String {
        format!("{}/scan-qr?plate={}&token={}", self.base_url, plate, token)
    }

    /// Renderizar el QR como PNG en memoria
    pub fn render_png(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let code = QrCode::new(url.as_bytes())
            .map_err(|e| AppError::Qr(format!("Error construyendo el QR: {}", e)))?;

        let img = code.render::<Luma<u8>>().min_dimensions(256, 256).build();

        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .map_err(|e| AppError::Qr(format!("Error codificando PNG: {}", e)))?;

        Ok(buf.into_inner())
    }

    /// Generar y guardar el PNG del QR; devuelve la ruta relativa guardada
    pub fn save_png(&self, plate: &str, url: &str) -> Result<String, AppError> {
        let png = self.render_png(url)?;

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| AppError::Qr(format!("Error creando directorio QR: {}", e)))?;

        let filename = format!("{}.png", plate.replace(' ', "_"));
        let path = Path::new(&self.output_dir).join(&filename);
        fs::write(&path, png)
            .map_err(|e| AppError::Qr(format!("Error guardando QR: {}", e)))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> QrService {
        QrService {
            base_url: "http://gate.example.com".to_string(),
            output_dir: "static".to_string(),
        }
    }

    #[test]
    fn test_scan_url_format() {
        let service = test_service();
        let url = service.scan_url("KDA123B", "tok-123");
        assert_eq!(url, "http://gate.example.com/scan-qr?plate=KDA123B&token=tok-123");
    }

    #[test]
    fn test_scan_url_with_empty_token() {
        // Sin dispositivos registrados el token va vacío (comportamiento heredado)
        let service = test_service();
        let url = service.scan_url("KDA123B", "");
        assert_eq!(url, "http://gate.example.com/scan-qr?plate=KDA123B&token=");
    }

    #[test]
    fn test_render_png_produces_png_bytes() {
        let service = test_service();
        let png = service
            .render_png("http://gate.example.com/scan-qr?plate=KDA123B&token=t")
            .unwrap();

        assert!(png.len() > 8);
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
