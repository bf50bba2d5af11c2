// アクセストークンの発行はゲートウェイ側で行うため、
// ここでは検証・失効に使う値型のみを持つ。
pub struct AccessToken(pub String);
