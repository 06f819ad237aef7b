pub mod anexo;
pub mod caracteristica;
pub mod corretor_principal;
pub mod empreendimento;
pub mod empreendimento_caracteristica;
pub mod endereco;
pub mod imovel;
pub mod imovel_caracteristica;
pub mod organizacao;
pub mod pacote;
pub mod planta;
pub mod preco_aluguel;
pub mod preco_venda;
pub mod torre;
