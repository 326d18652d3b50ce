mod orthographic_camera;

pub use orthographic_camera::OrthographicCamera;
